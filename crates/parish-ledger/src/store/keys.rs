//! Partition key scheme. Keys embed the parish name verbatim so data written
//! by earlier deployments of the system keeps resolving to the same records.

/// The user directory is global, not per parish.
pub const USERS: &str = "users";

pub fn receipts_key(parish: &str) -> String {
    format!("receipts_{parish}")
}

pub fn intentions_key(parish: &str) -> String {
    format!("intentions_{parish}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_embed_parish_verbatim() {
        assert_eq!(
            receipts_key("Parroquia San Isidro Labrador"),
            "receipts_Parroquia San Isidro Labrador"
        );
        assert_eq!(
            intentions_key("Parroquia San Isidro Labrador"),
            "intentions_Parroquia San Isidro Labrador"
        );
    }

    #[test]
    fn distinct_parishes_get_distinct_keys() {
        assert_ne!(receipts_key("Santa Cecilia"), receipts_key("San Judas"));
        assert_ne!(receipts_key("Santa Cecilia"), intentions_key("Santa Cecilia"));
    }
}
