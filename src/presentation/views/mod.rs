mod metric_card;

pub use metric_card::{MetricCard, MetricValue};
