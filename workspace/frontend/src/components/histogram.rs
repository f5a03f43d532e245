mod image_select;
mod page;
mod plotly_chart;
mod view;

pub use view::HistogramView;
