use super::{ModalContentStyle, ModalOverlayStyle, Theme, ThemeModalStyle, ThemeProperties};

pub const LIGHT_THEME: Theme = Theme {
    components_theme: ThemeProperties {
        background: "#f5f5f5",
        border_color: "#dedede",
        box_shadow: "0 10px 10px rgba(0, 0, 0, 0.1)",
        button_convert_background_color: "#fff",
        button_convert_border_color: "#dedede",
        button_convert_text_color: "#474747",
        button_error_background_color: "#ff6534",
        button_primary_background_color: "#002979",
        button_secondary_background_color: "#474747",
        button_tertiary_background_color: "#f6851b",
        card_background_color: "#fff",
        card_border_color: "#dedede",
        card_title_color: "#000",
        dark_blue: "#002979",
        dark_gray: "#474747",
        darker_gray: "#474747",
        dropdown_background_color: "#fff",
        dropdown_border_color: "#dedede",
        dropdown_text_color: "#000",
        error_button_background: "#ff6534",
        error_card_background: "#fae4e0",
        error_card_border: "#ff6534",
        error_card_text: "#ff6534",
        eth_box_active_color: "#00ae99",
        eth_box_border_color: "#dedede",
        eth_set_min_eth_button_border_color: "#00ae99",
        eth_slider_thumb_color: "#fff",
        eth_slider_thumb_border_color: "#dedede",
        gray: "#666",
        green: "#3cb34f",
        icon_locked_color: "#ff6534",
        icon_unlocked_color: "#c4c4c4",
        inactive_tab_background_color: "#f9f9f9",
        light_gray: "#acacac",
        logo_color: "#0029ff",
        logo_text_color: "#000",
        markets_search_field_background_color: "#eee",
        markets_search_field_border_color: "#dedede",
        markets_search_field_text_color: "#474747",
        notification_active: "#f5f5f5",
        notification_icon_color: "#acacac",
        notifications_badge_color: "#ff6534",
        number_decimals_color: "#acacac",
        orange: "#f6851b",
        row_active: "#f5f5f5",
        table_border_color: "#cecece",
        td_color: "#000",
        text_color_common: "#000",
        text_dark: "#000",
        text_input_background_color: "#f9f9f9",
        text_input_border_color: "#dedede",
        text_input_text_color: "#474747",
        text_light: "#666",
        text_lighter: "#acacac",
        th_color: "#ccc",
        topbar_background_color: "#fff",
        topbar_border_color: "#dedede",
        topbar_separator_color: "#dedede",
        steps_progress_starting_dot_color: "#999",
        steps_progress_step_title_color: "#acacac",
        steps_progress_step_title_color_active: "#000",
        steps_progress_step_line_color: "#cecece",
        steps_progress_step_line_progress_color: "#00ae99",
        steps_progress_check_mark_color: "#fff",
        button_text_color: "#fff",
    },
    modal_theme: ThemeModalStyle {
        content: ModalContentStyle {
            background_color: "#fff",
            bottom: "auto",
            border_color: "#dedede",
            flex_grow: "0",
            left: "auto",
            min_width: "350px",
            position: "relative",
            right: "auto",
            top: "auto",
        },
        overlay: ModalOverlayStyle {
            align_items: "center",
            background_color: "rgba(0, 0, 0, 0.6)",
            display: "flex",
            justify_content: "center",
            z_index: "12345",
        },
    },
};
