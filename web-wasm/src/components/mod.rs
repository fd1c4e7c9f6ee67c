pub mod header;
pub mod settings_panel;
pub mod upload_area;
pub mod result_panel;
pub mod feature_cards;
pub mod upload_analysis_view;
