use uuid::Uuid;

/// Source of the unique id stamped on each declaration.
pub trait IdGenerator {
    fn generate(&self) -> Uuid;
}

/// Fresh random (v4) id on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Always returns the same id. Used to make output reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedId(pub Uuid);

impl IdGenerator for FixedId {
    fn generate(&self) -> Uuid {
        self.0
    }
}
