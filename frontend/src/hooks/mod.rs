pub mod debounce;
pub mod persisted;
pub mod request_scope;
pub mod title;

pub use debounce::{use_debounce, Debouncer, Scheduler, TimeoutScheduler};
pub use persisted::{
    default_store, use_persisted, BrowserStorage, KeyValueStore, MemoryStorage, PersistError,
    PersistedValue, StoreError, UsePersistedHandle,
};
pub use request_scope::{use_request_scope, RequestScope};
pub use title::{set_document_title, TitleSync};
