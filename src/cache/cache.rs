use super::entry::Entry;
use super::entry::Provenance;
use super::stats::Stats;
use super::store::Store;
use crate::canon::Key;
use crate::error::Error;
use crate::solver::Solution;
use futures::future::BoxFuture;
use futures::future::FutureExt;
use futures::future::Shared;
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

type Flight = Shared<BoxFuture<'static, Result<Arc<Entry>, Error>>>;

/// the cache facade: durable store plus a single-flight registry so
/// concurrent requests for one key cost one solve. cheap to clone, all
/// clones share state.
#[derive(Clone)]
pub struct Cache(Arc<Inner>);

struct Inner {
    store: Store,
    flights: Mutex<HashMap<Key, Flight>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Cache {
    pub fn open(dir: &Path) -> Result<Self, Error> {
        Ok(Self(Arc::new(Inner {
            store: Store::open(dir)?,
            flights: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })))
    }

    pub fn get(&self, key: &Key) -> Option<Arc<Entry>> {
        match self.0.store.get(key) {
            Some(entry) => {
                self.0.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry)
            }
            None => {
                self.0.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// unconditional write, used for bulk seeding and forced refreshes
    pub fn put(
        &self,
        key: Key,
        solution: Solution,
        provenance: Provenance,
    ) -> Result<Arc<Entry>, Error> {
        let entry = Arc::new(Entry::new(key, solution, provenance));
        self.0.store.put(&entry)?;
        Ok(entry)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            hits: self.0.hits.load(Ordering::Relaxed),
            misses: self.0.misses.load(Ordering::Relaxed),
            size: self.0.store.len(),
        }
    }

    /// hit the store or join/start the one computation for this key.
    ///
    /// the computation runs in its own task, so a caller giving up on
    /// its await does not cancel a solve that other callers (or the
    /// cache itself) still want. a storage failure after a successful
    /// solve is logged and absorbed: the caller gets its solution and
    /// the key simply stays a miss.
    pub async fn load<F, Fut>(&self, key: Key, compute: F) -> Result<Arc<Entry>, Error>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Solution, Error>> + Send + 'static,
    {
        if let Some(entry) = self.get(&key) {
            return Ok(entry);
        }
        let flight = {
            let mut flights = self.0.flights.lock().expect("lock never poisoned");
            // a flight may have landed between the miss and this lock
            if let Some(entry) = self.0.store.get(&key) {
                return Ok(entry);
            }
            match flights.get(&key) {
                Some(flight) => flight.clone(),
                None => {
                    log::debug!("{:<32}{}", "launching solve", key);
                    let inner = self.0.clone();
                    let owned = key.clone();
                    let handle = tokio::spawn(async move {
                        let result = match compute().await {
                            Ok(solution) => {
                                let entry = Arc::new(Entry::new(
                                    owned.clone(),
                                    solution,
                                    Provenance::Dynamic,
                                ));
                                if let Err(e) = inner.store.put(&entry) {
                                    log::warn!("{:<32}{}", "absorbing cache write failure", e);
                                }
                                Ok(entry)
                            }
                            Err(e) => Err(e),
                        };
                        // the owning task retires its own registry entry
                        // before settling, so a waiter of this flight can
                        // never evict a successor flight for the same key
                        inner
                            .flights
                            .lock()
                            .expect("lock never poisoned")
                            .remove(&owned);
                        result
                    });
                    let flight: Flight = async move {
                        match handle.await {
                            Ok(result) => result,
                            Err(e) => Err(Error::Cache(format!("solve task failed: {}", e))),
                        }
                    }
                    .boxed()
                    .shared();
                    flights.insert(key.clone(), flight.clone());
                    flight
                }
            }
        };
        let result = flight.clone().await;
        // backstop for a task that never settled cleanly: drop the
        // registry entry only if it is still this very flight
        let mut flights = self.0.flights.lock().expect("lock never poisoned");
        if flights.get(&key).is_some_and(|current| current.ptr_eq(&flight)) {
            flights.remove(&key);
        }
        result
    }
}
