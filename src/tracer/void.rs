use super::traits::Tracer;

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidTracer;

impl VoidTracer {
    pub fn new() -> Self {
        Self
    }
}

impl Tracer for VoidTracer {
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn critical(&self, _message: &str) {}
    fn fatal(&self, _message: &str) {}
    fn verbose(&self, _message: &str) {}

    fn name(&self) -> &'static str {
        "void"
    }
}
