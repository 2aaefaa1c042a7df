pub mod add_round_modal;
pub mod app;
pub mod confirm_modal;
pub mod header_bar;
pub mod modal_frame;
pub mod rounds_list;
pub mod score_box;
pub mod settings_modal;
pub mod winner_overlay;
