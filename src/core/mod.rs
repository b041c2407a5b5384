pub mod dispatch;
pub mod services;
