pub mod rm;
