// Identifier generation for new cells

pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> anyhow::Result<String>;
}
