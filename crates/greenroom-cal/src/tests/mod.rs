//! Multi-module scenario tests exercising expansion, layout, and the grid
//! together on whole months.
