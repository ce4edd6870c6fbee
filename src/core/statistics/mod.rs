mod grouping;
mod mean_statistic;
mod median_statistic;
mod statistic;

pub use grouping::summarize_groups;
pub use mean_statistic::MeanStatistic;
pub use median_statistic::MedianStatistic;
pub use statistic::Statistic;
