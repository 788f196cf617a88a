pub mod model;

pub mod orgchart;
