//! Simulated payment provider.
//!
//! Stands in for a real store SDK: every call waits a fixed delay and then
//! resolves with an outcome picked uniformly at random from the set valid
//! for the request. The random source is injectable so runs can be seeded.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::product::Product;
use super::transaction::{PurchaseOutcome, RestoreOutcome, TransactionKind, TransactionOutcome};

/// Simulated round-trip latency.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

type SharedRng = Arc<Mutex<Box<dyn RngCore + Send>>>;

/// Pick one of `options` uniformly at random.
///
/// # Panics
/// Panics if `options` is empty.
pub fn choose_uniform<R, T>(rng: &mut R, mut options: Vec<T>) -> T
where
    R: Rng + ?Sized,
{
    let index = rng.gen_range(0..options.len());
    options.swap_remove(index)
}

/// Cheap to clone; clones share the random source.
#[derive(Clone)]
pub struct TransactionSimulator {
    delay: Duration,
    rng: SharedRng,
}

impl TransactionSimulator {
    /// Simulator backed by an entropy-seeded generator.
    pub fn new(delay: Duration) -> Self {
        Self::with_rng(delay, StdRng::from_entropy())
    }

    /// Simulator whose outcome sequence is fully determined by `seed`.
    pub fn seeded(delay: Duration, seed: u64) -> Self {
        Self::with_rng(delay, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(delay: Duration, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            delay,
            rng: Arc::new(Mutex::new(Box::new(rng))),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fetch the product on sale. Always succeeds.
    pub async fn request_product(&self) -> Product {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "requesting product");
        tokio::time::sleep(self.delay).await;
        Product::remove_ads()
    }

    /// Request a new purchase: completed or failed, equally likely.
    pub async fn purchase(&self) -> PurchaseOutcome {
        tracing::debug!("requesting new purchase");
        tokio::time::sleep(self.delay).await;
        let outcome = self.pick(Vec::from(PurchaseOutcome::all()));
        tracing::debug!(?outcome, "purchase resolved");
        outcome
    }

    /// Request a restore: restored, nothing to restore, or failed.
    pub async fn restore(&self) -> RestoreOutcome {
        tracing::debug!("requesting restore");
        tokio::time::sleep(self.delay).await;
        let outcome = self.pick(Vec::from(RestoreOutcome::all()));
        tracing::debug!(?outcome, "restore resolved");
        outcome
    }

    pub async fn request(&self, kind: TransactionKind) -> TransactionOutcome {
        match kind {
            TransactionKind::NewPurchase => self.purchase().await.into(),
            TransactionKind::RestorePurchases => self.restore().await.into(),
        }
    }

    fn pick<T>(&self, options: Vec<T>) -> T {
        let mut rng = self.rng.lock();
        choose_uniform(&mut **rng, options)
    }
}

impl std::fmt::Debug for TransactionSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionSimulator")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashMap;

    #[test]
    fn choose_uniform_covers_every_option() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 3];
        for _ in 0..3_000 {
            counts[choose_uniform(&mut rng, vec![0usize, 1, 2])] += 1;
        }
        assert!(counts.iter().all(|&c| c > 800), "counts: {:?}", counts);
    }

    #[test]
    fn choose_uniform_single_option() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(choose_uniform(&mut rng, vec!["only"]), "only");
    }

    #[tokio::test]
    async fn product_is_fixed() {
        let simulator = TransactionSimulator::seeded(Duration::ZERO, 1);
        assert_eq!(simulator.request_product().await, Product::remove_ads());
        assert_eq!(simulator.request_product().await, Product::remove_ads());
    }

    #[tokio::test]
    async fn request_reports_matching_kind() {
        let simulator = TransactionSimulator::seeded(Duration::ZERO, 3);
        for _ in 0..50 {
            let outcome = simulator.request(TransactionKind::NewPurchase).await;
            assert_eq!(outcome.kind(), TransactionKind::NewPurchase);
            let outcome = simulator.request(TransactionKind::RestorePurchases).await;
            assert_eq!(outcome.kind(), TransactionKind::RestorePurchases);
        }
    }

    #[tokio::test]
    async fn same_seed_same_sequence() {
        let a = TransactionSimulator::seeded(Duration::ZERO, 99);
        let b = TransactionSimulator::seeded(Duration::ZERO, 99);
        for _ in 0..20 {
            assert_eq!(a.restore().await, b.restore().await);
        }
    }

    #[tokio::test]
    async fn restore_frequencies_are_roughly_uniform() {
        let simulator = TransactionSimulator::seeded(Duration::ZERO, 11);
        let mut counts: HashMap<RestoreOutcome, usize> = HashMap::new();
        for _ in 0..3_000 {
            *counts.entry(simulator.restore().await).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&c| c > 800), "counts: {:?}", counts);
    }

    #[tokio::test(start_paused = true)]
    async fn purchase_waits_for_delay() {
        let simulator = TransactionSimulator::seeded(DEFAULT_DELAY, 5);
        let started = tokio::time::Instant::now();
        simulator.purchase().await;
        assert!(started.elapsed() >= DEFAULT_DELAY);
    }
}
