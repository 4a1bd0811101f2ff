pub mod card_action_buttons;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_alert;
pub mod search_input_top_bar;
pub mod search_result_item_card;
pub mod search_result_list;
