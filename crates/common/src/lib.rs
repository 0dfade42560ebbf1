pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn envelope_omits_absent_fields() {
        let ok = serde_json::to_value(types::Envelope::ok(vec![1, 2]).with_count(2)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": [1, 2], "count": 2}));

        let err = serde_json::to_value(types::Envelope::<()>::failure("Service not found")).unwrap();
        assert_eq!(err, serde_json::json!({"success": false, "error": "Service not found"}));
    }
}
