/// Composite preview pane
///
/// Draws the composite handle at its native document size,
/// shrinking only when the pane is smaller than the document
/// (ContentFit::ScaleDown never upscales).

use iced::widget::image::{Handle, Image};
use iced::widget::container;
use iced::{ContentFit, Element, Length};

use crate::Message;

pub fn preview_pane(handle: &Handle) -> Element<'static, Message> {
    let image = Image::new(handle.clone()).content_fit(ContentFit::ScaleDown);

    container(image)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(10)
        .into()
}
