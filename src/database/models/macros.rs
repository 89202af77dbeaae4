/// Stores an enum as a TEXT column using the given string per variant.
macro_rules! sqlite_text_enum {
    (
        $name:ident {
            $($variant:ident => $str_val:literal),* $(,)?
        }
    ) => {
        impl sqlx::Type<sqlx::Sqlite> for $name {
            fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
                <String as sqlx::Type<sqlx::Sqlite>>::type_info()
            }
        }

        impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for $name {
            fn encode_by_ref(
                &self,
                args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                let s = match self {
                    $($name::$variant => $str_val),*
                };
                <&str as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&s, args)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for $name {
            fn decode(
                value: sqlx::sqlite::SqliteValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
                match s.as_str() {
                    $($str_val => Ok($name::$variant)),*,
                    _ => Err(format!("Invalid {}: {}", stringify!($name), s).into()),
                }
            }
        }
    };
}

pub(crate) use sqlite_text_enum;
