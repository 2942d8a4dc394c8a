use uuid::Uuid;

/// Generates a record id like `thread-1c9e6679e6794bdbb04a8d1a1cd729d6`.
/// Fits the VARCHAR(50) id columns for every prefix in use.
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_the_prefix() {
        let id = generate_id("thread");
        assert!(id.starts_with("thread-"));
    }

    #[test]
    fn fits_the_id_column() {
        assert!(generate_id("comment").len() <= 50);
    }

    #[test]
    fn ids_are_fresh() {
        assert_ne!(generate_id("thread"), generate_id("thread"));
    }
}
