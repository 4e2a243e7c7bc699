use super::{LabelFormat, RangeFit, ThetaLayout};

/// Fixed range and interval for the angular axis of a polar plot, in degrees.
pub(super) fn fit(layout: ThetaLayout) -> RangeFit {
    let (start, end, interval) = match layout {
        ThetaLayout::FullCircle => (0.0, 360.0, 30.0),
        ThetaLayout::AllQuadrants => (0.0, 360.0, 45.0),
        ThetaLayout::FirstQuadrant => (0.0, 90.0, 30.0),
        ThetaLayout::SecondQuadrant => (90.0, 180.0, 30.0),
        ThetaLayout::ThirdQuadrant => (180.0, 270.0, 30.0),
        ThetaLayout::FourthQuadrant => (270.0, 360.0, 30.0),
    };
    RangeFit {
        start,
        end,
        interval,
        format: LabelFormat::Integer,
    }
}
