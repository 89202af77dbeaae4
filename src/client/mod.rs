//! Client core: the state a logged-in team works with, independent of any UI toolkit.
//!
//! Everything here runs on a single logical writer ([`ScrimClient`]); the
//! only suspension points are calls through [`ScrimApi`].

pub mod api;
pub mod controller;
pub mod directory;
pub mod error;
pub mod i18n;
pub mod links;
pub mod notifications;
pub mod persistence;
pub mod scrims;
pub mod state;
pub mod storage;
pub mod view;

pub use api::{HttpScrimApi, RegistrationForm, ScrimApi};
pub use controller::ScrimClient;
pub use directory::{DirectoryFilter, TeamDirectory};
pub use error::{AuthError, ClientError};
pub use i18n::Lang;
pub use notifications::{Notification, NotificationLog};
pub use persistence::{Restored, Session, SessionPersistence};
pub use scrims::{ScrimResult, ScrimResultLog, ScrimStats, ScrimSubmission};
pub use state::{ClientState, Tab};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use view::{View, render};
