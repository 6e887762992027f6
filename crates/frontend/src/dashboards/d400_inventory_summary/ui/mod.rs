pub mod category_chart;
pub mod stats_cards;

pub use category_chart::CategoryChart;
pub use stats_cards::StatsCards;
