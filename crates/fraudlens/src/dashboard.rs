//! Render-cycle orchestration.
//!
//! A `Dashboard` owns the sample cache and runs one synchronous
//! pipeline per cycle: cache read → panel aggregation → risk filter →
//! graph build → layout → extraction. A cycle always runs to
//! completion; there is no shared mutable state beyond the cache,
//! which is replaced wholesale on expiry.

use fraudlens_analytics::filter::FilterCriteria;
use fraudlens_analytics::geo::{city_distribution, CityStat};
use fraudlens_analytics::kpi::KpiBlock;
use fraudlens_analytics::leaderboard::{
    top_merchants, top_risky_transactions, MerchantStat, TOP_MERCHANTS, TOP_TRANSACTIONS,
};
use fraudlens_analytics::trend::{hourly_trend, risk_histogram, HourlyPoint, RiskBucket};
use fraudlens_core::types::Transaction;
use fraudlens_core::{DashboardConfig, Result};
use fraudlens_data::SampleCache;
use fraudlens_graph::{extract, filter_high_risk, spring_layout_with_budget, NetworkView, RelationGraph};
use serde::{Deserialize, Serialize};

/// Everything one render cycle hands to the rendering layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Header counters.
    pub kpis: KpiBlock,
    /// Per-city fraud distribution.
    pub cities: Vec<CityStat>,
    /// Hourly attempt trend.
    pub hourly: Vec<HourlyPoint>,
    /// Risk-score histogram.
    pub histogram: Vec<RiskBucket>,
    /// Riskiest transactions table.
    pub top_transactions: Vec<Transaction>,
    /// Most-targeted merchants.
    pub top_merchants: Vec<MerchantStat>,
    /// Filtered transaction table.
    pub filtered: Vec<Transaction>,
    /// Laid-out relationship graph, ready to plot.
    pub network: NetworkView,
}

/// The monitoring core: cached sample plus per-cycle computation.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    cache: SampleCache,
    criteria: FilterCriteria,
}

impl Dashboard {
    /// Create a dashboard with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the config fails validation.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let cache = SampleCache::new(config.sample_size, config.cache_ttl, config.layout_seed);
        Ok(Self {
            config,
            cache,
            criteria: FilterCriteria::any(),
        })
    }

    /// Replace the interactive filter criteria used by subsequent
    /// cycles.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Current filter criteria.
    #[must_use]
    pub fn filter(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Run one full render cycle and return its snapshot.
    ///
    /// Reads the cached sample (regenerating it past the TTL), then
    /// computes every panel and the relationship network sequentially.
    ///
    /// # Errors
    ///
    /// Only the layout/extraction consistency check can fail, and only
    /// on programmer error; all aggregation is total.
    pub fn render_cycle(&mut self) -> Result<DashboardSnapshot> {
        let batch: Vec<Transaction> = self.cache.get().to_vec();
        let seed = self.config.layout_seed;

        let kpis = KpiBlock::compute(&batch, seed);
        let cities = city_distribution(&batch);
        let hourly = hourly_trend(&batch);
        let histogram = risk_histogram(&batch);
        let top_transactions = top_risky_transactions(&batch, TOP_TRANSACTIONS);
        let top = top_merchants(&batch, TOP_MERCHANTS);
        let filtered = self.criteria.apply(&batch);

        let subset = filter_high_risk(
            &batch,
            self.config.risk_threshold,
            self.config.graph_sample_bound,
            seed,
        );
        let graph = RelationGraph::from_transactions(&subset);
        let layout = spring_layout_with_budget(
            &graph,
            seed,
            self.config.spring_k,
            self.config.layout_iterations,
        );
        let network = extract(&graph, &layout)?;

        tracing::info!(
            total = kpis.total,
            graph_nodes = graph.node_count(),
            graph_edges = graph.edge_count(),
            "render cycle complete"
        );

        Ok(DashboardSnapshot {
            kpis,
            cities,
            hourly,
            histogram,
            top_transactions,
            top_merchants: top,
            filtered,
            network,
        })
    }
}
