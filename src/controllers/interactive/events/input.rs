use crate::controllers::interactive::errors::input_event::InputEventParseError;
use crate::core::data::point::Point;
use std::str::FromStr;

/// Input the controller understands, with pointer positions in field pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PointerPress(Point),
    PointerDrag(Point),
    PointerRelease,
    IncreaseIterations,
    DecreaseIterations,
    ZoomIn,
    ZoomOut,
}

/// Parses the scripted form used by the CLI: `press:x,y`, `drag:x,y`,
/// `release`, `more`, `less`, `in` and `out`.
impl FromStr for InputEvent {
    type Err = InputEventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.split_once(':') {
            Some(("press", position)) => Ok(Self::PointerPress(parse_point(position)?)),
            Some(("drag", position)) => Ok(Self::PointerDrag(parse_point(position)?)),
            Some(_) => Err(InputEventParseError::UnknownEvent(s.to_string())),
            None => match s {
                "release" => Ok(Self::PointerRelease),
                "more" => Ok(Self::IncreaseIterations),
                "less" => Ok(Self::DecreaseIterations),
                "in" => Ok(Self::ZoomIn),
                "out" => Ok(Self::ZoomOut),
                _ => Err(InputEventParseError::UnknownEvent(s.to_string())),
            },
        }
    }
}

fn parse_point(position: &str) -> Result<Point, InputEventParseError> {
    let invalid = || InputEventParseError::InvalidPosition(position.to_string());
    let (x, y) = position.split_once(',').ok_or_else(invalid)?;

    Ok(Point {
        x: x.trim().parse().map_err(|_| invalid())?,
        y: y.trim().parse().map_err(|_| invalid())?,
    })
}
