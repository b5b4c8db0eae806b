#![allow(dead_code)]

pub mod mock_keyboard;
pub mod mock_stdout;
