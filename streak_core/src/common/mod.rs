pub mod enums;
pub mod func_util;
pub mod streak_exception;
