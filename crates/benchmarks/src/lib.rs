//! Benchmark utilities for the transaction priority subsystem

pub mod utils {
    use primitive_types::H256;
    use qc_12_tx_priority::TxEntrySummary;
    use rand::Rng;

    pub fn generate_random_hash() -> H256 {
        let mut hash = [0u8; 32];
        rand::thread_rng().fill(&mut hash);
        H256::from(hash)
    }

    /// Pool snapshot of `count` entries with random packages.
    ///
    /// Fees are drawn from a narrow range so metric ties, and with them the
    /// hash tie-break, show up often.
    pub fn generate_snapshot(count: usize) -> Vec<TxEntrySummary> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                let fee = rng.gen_range(100..5_000);
                let size = rng.gen_range(150..1_500);
                let ancestor_fee = fee + rng.gen_range(0..20_000);
                let ancestor_size = size + rng.gen_range(0..10_000);
                TxEntrySummary::new(generate_random_hash(), fee, size)
                    .with_ancestors(ancestor_fee, ancestor_size)
            })
            .collect()
    }
}
