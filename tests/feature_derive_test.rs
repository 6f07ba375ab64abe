#[cfg(feature = "derive")]
#[cfg(test)]
mod tests {
    use hashring_simulator::LoadReport;

    #[test]
    fn test_serialize_and_deserialize_load_report() {
        let original = LoadReport {
            requests_per_server: [("alpha".to_string(), 60), ("beta".to_string(), 40)].into(),
            load_factor: 1.2,
        };

        // Serialize the `LoadReport` instance to JSON
        let serialized = serde_json::to_string(&original).expect("Serialization failed");

        // Deserialize the JSON string back into a `LoadReport` instance
        let deserialized: LoadReport =
            serde_json::from_str(&serialized).expect("Deserialization failed");

        // Assert that the original and deserialized instances are equal
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_serialize_live_report() {
        let mut ring = hashring_simulator::Ring::new(1_000);

        for x in 0..100 {
            ring.add_request(&format!("req_{x}"));
        }
        ring.add_server("alpha").expect("ring has free slots");

        let serialized = serde_json::to_string(&ring.load_report()).expect("Serialization failed");

        assert!(serialized.contains("\"alpha\":100"));
        assert!(serialized.contains("\"load_factor\":1.0"));
    }
}
