// UUID-backed cell identifiers
use crate::application::id_generator::IdGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> anyhow::Result<String> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}
