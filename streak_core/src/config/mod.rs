pub mod streak_config;
