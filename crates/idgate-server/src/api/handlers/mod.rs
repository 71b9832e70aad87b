//! API request handlers

pub mod login;
pub mod register;
pub mod whoami;

pub use login::{login, AppState, IamConfig, LoginRequest, LoginResponse};
pub use register::{register, RegisterRequest, RegisterResponse};
pub use whoami::{whoami, WhoAmIRequest, WhoAmIResponse};
