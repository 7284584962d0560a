mod bounded_text;
mod logger;
mod mock;
