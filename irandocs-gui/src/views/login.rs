use iced::{
    alignment,
    widget::Space,
    Alignment, Length,
};
use irandocs_ui::{
    component::{button, card, form, text},
    theme,
    widget::*,
};

use crate::state::{Msg, State};

pub fn login_view(state: &State) -> Element<'_, Msg> {
    let login = &state.views.login;

    let title = Row::new()
        .push(Space::with_width(Length::Fill))
        .push(text::h3("IranDocs"))
        .push(Space::with_width(Length::Fill));

    let mobile = form::Form::new("09*********", &login.mobile, Msg::LoginUpdateMobile)
        .size(16)
        .padding(10);

    let password = form::Form::new("Password", &login.password, Msg::LoginUpdatePassword)
        .secure(!login.password_visible)
        .on_submit(Msg::LoginSubmit)
        .size(16)
        .padding(10);
    let toggle = button::transparent(
        None,
        if login.password_visible {
            "Hide"
        } else {
            "Show"
        },
    )
    .on_press(Msg::LoginTogglePasswordVisibility);
    let password = Row::new()
        .push(Container::new(password).width(Length::Fill))
        .push(toggle)
        .spacing(10)
        .align_y(Alignment::Start);

    let enter = button::primary(None, "Enter")
        .on_press(Msg::LoginSubmit)
        .width(Length::Fill)
        .height(Length::Fixed(55.0));

    let card_content = Column::new()
        .push(title)
        .push(Space::with_height(15))
        .push(text::caption("Mobile").style(theme::text::secondary))
        .push(mobile)
        .push(text::caption("Password").style(theme::text::secondary))
        .push(password)
        .push(Space::with_height(25))
        .push(enter)
        .spacing(8);

    let forgot = button::link(None, "forgot your password... tap on me").on_press(Msg::SheetOpen);

    let content = Column::new()
        .push(card::simple(card_content).width(Length::Fixed(340.0)))
        .push(forgot)
        .spacing(10)
        .align_x(Alignment::Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(theme::container::background)
        .into()
}
