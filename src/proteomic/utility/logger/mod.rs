pub mod simple_logger;
