use std::io::{Result, Write};
use std::sync::{Arc, Mutex};

/// Captures everything a `tracing` subscriber writes, for assertions.
#[derive(Debug, Clone, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8(buffer.clone()).expect("utf8")
    }

    pub fn clear(&self) {
        self.buffer.lock().unwrap().clear();
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
