use super::{ModalContentStyle, ModalOverlayStyle, Theme, ThemeModalStyle, ThemeProperties};

pub const DARK_THEME: Theme = Theme {
    components_theme: ThemeProperties {
        background: "#000",
        border_color: "#5a5a5a",
        box_shadow: "0 10px 10px rgba(0, 0, 0, 0.5)",
        button_convert_background_color: "#202123",
        button_convert_border_color: "#5a5a5a",
        button_convert_text_color: "#dedede",
        button_error_background_color: "#ff6534",
        button_primary_background_color: "#3a65eb",
        button_secondary_background_color: "#505050",
        button_tertiary_background_color: "#f6851b",
        card_background_color: "#202123",
        card_border_color: "#5a5a5a",
        card_title_color: "#fff",
        dark_blue: "#3a65eb",
        dark_gray: "#dedede",
        darker_gray: "#474747",
        dropdown_background_color: "#202123",
        dropdown_border_color: "#5a5a5a",
        dropdown_text_color: "#fff",
        error_button_background: "#ff6534",
        error_card_background: "#4a2420",
        error_card_border: "#ff6534",
        error_card_text: "#ff8a65",
        eth_box_active_color: "#00ae99",
        eth_box_border_color: "#5a5a5a",
        eth_set_min_eth_button_border_color: "#00ae99",
        eth_slider_thumb_color: "#202123",
        eth_slider_thumb_border_color: "#5a5a5a",
        gray: "#b9b9b9",
        green: "#00ae99",
        icon_locked_color: "#ff6534",
        icon_unlocked_color: "#5a5a5a",
        inactive_tab_background_color: "#2a2b2e",
        light_gray: "#7e7e7e",
        logo_color: "#3a65eb",
        logo_text_color: "#fff",
        markets_search_field_background_color: "#2a2b2e",
        markets_search_field_border_color: "#5a5a5a",
        markets_search_field_text_color: "#dedede",
        notification_active: "#2a2b2e",
        notification_icon_color: "#7e7e7e",
        notifications_badge_color: "#ff6534",
        number_decimals_color: "#5a5a5a",
        orange: "#ff6534",
        row_active: "#2a2b2e",
        table_border_color: "#5a5a5a",
        td_color: "#fff",
        text_color_common: "#fff",
        text_dark: "#fff",
        text_input_background_color: "#2a2b2e",
        text_input_border_color: "#5a5a5a",
        text_input_text_color: "#dedede",
        text_light: "#b9b9b9",
        text_lighter: "#7e7e7e",
        th_color: "#7e7e7e",
        topbar_background_color: "#202123",
        topbar_border_color: "#5a5a5a",
        topbar_separator_color: "#5a5a5a",
        steps_progress_starting_dot_color: "#7e7e7e",
        steps_progress_step_title_color: "#7e7e7e",
        steps_progress_step_title_color_active: "#fff",
        steps_progress_step_line_color: "#5a5a5a",
        steps_progress_step_line_progress_color: "#00ae99",
        steps_progress_check_mark_color: "#202123",
        button_text_color: "#fff",
    },
    modal_theme: ThemeModalStyle {
        content: ModalContentStyle {
            background_color: "#202123",
            bottom: "auto",
            border_color: "#5a5a5a",
            flex_grow: "0",
            left: "auto",
            min_width: "350px",
            position: "relative",
            right: "auto",
            top: "auto",
        },
        overlay: ModalOverlayStyle {
            align_items: "center",
            background_color: "rgba(0, 0, 0, 0.8)",
            display: "flex",
            justify_content: "center",
            z_index: "12345",
        },
    },
};
