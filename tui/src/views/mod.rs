pub mod alert;
pub mod help;
pub mod settings;
pub mod typer;
