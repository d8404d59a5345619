pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod register;
pub mod stats;
