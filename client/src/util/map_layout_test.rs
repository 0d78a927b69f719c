use super::*;

#[test]
fn first_three_markers_use_table_order() {
    assert_eq!(marker_offset(0), MapOffset { left_pct: 18.0, top_pct: 28.0 });
    assert_eq!(marker_offset(1), MapOffset { left_pct: 55.0, top_pct: 45.0 });
    assert_eq!(marker_offset(2), MapOffset { left_pct: 72.0, top_pct: 38.0 });
}

#[test]
fn marker_offsets_wrap_past_table_end() {
    assert_eq!(marker_offset(3), marker_offset(0));
    assert_eq!(marker_offset(7), marker_offset(1));
}

#[test]
fn marker_style_is_percent_based() {
    assert_eq!(marker_offset(1).style(), "left:55%;top:45%;");
}

#[test]
fn zone_overlay_styles() {
    assert_eq!(ZONE_OVERLAYS[0].style(), "left:15%;top:25%;width:128px;height:128px;");
    assert_eq!(ZONE_OVERLAYS[1].style(), "right:20%;top:35%;width:96px;height:96px;");
}
