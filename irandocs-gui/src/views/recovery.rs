use iced::{widget::Space, Length};
use irandocs_ui::{
    component::{button, card, form, text},
    widget::*,
};

use crate::state::{Msg, State};

pub fn sheet_view(state: &State) -> Element<'_, Msg> {
    let recovery = &state.views.recovery;

    let mobile = form::Form::new("09*********", &recovery.mobile, Msg::SheetUpdateMobile)
        .on_submit(Msg::SheetSendCode)
        .size(16)
        .padding(10);

    let send = button::primary(None, "Send Code")
        .on_press(Msg::SheetSendCode)
        .width(Length::Fill)
        .height(Length::Fixed(55.0));

    let content = Column::new()
        .push(text::p1_regular(
            "please enter your phone number below, in order to receive SMS code",
        ))
        .push(Container::new(mobile).width(Length::Fill))
        .push(Space::with_height(20))
        .push(send)
        .spacing(15)
        .padding(32)
        .width(Length::Fixed(420.0));

    card::sheet(content).into()
}
