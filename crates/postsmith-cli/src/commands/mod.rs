pub mod export;
pub mod generate;
pub mod history;
pub mod init;
pub mod settings;
pub mod template;
