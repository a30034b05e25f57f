pub mod cancel;
pub mod commit;
pub mod compare;
pub mod dispatch;
pub mod log;
pub mod progress;
pub mod shared;
pub mod staged;
pub mod sync;
pub mod validate;
