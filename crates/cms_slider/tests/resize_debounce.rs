mod common;

use cms_slider::{RecordingHost, SliderConfig, SliderPage};
use common::{grouped_ids, init_logging, parse, slider_markup};
use core::time::Duration;
use html::Dom;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::time::sleep;

fn mount(items: usize, per_slide: &str) -> (Dom, SliderPage, RecordingHost) {
    init_logging();
    let mut dom = parse(&slider_markup(items, per_slide, ""));
    let mut host = RecordingHost::default();
    let page = SliderPage::mount_all(&mut dom, 1024, SliderConfig::default(), &mut host).unwrap();
    (dom, page, host)
}

fn slide_count(dom: &Dom, page: &SliderPage) -> usize {
    grouped_ids(dom, page.sliders()[0].mask()).len()
}

#[test]
fn poll_waits_for_quiet_period() {
    let (mut dom, mut page, mut host) = mount(7, "3");
    let start = Instant::now();
    page.on_resize(500, start);
    assert_eq!(page.next_deadline(), Some(start + Duration::from_millis(150)));
    assert_eq!(page.poll(&mut dom, start + Duration::from_millis(149), &mut host).unwrap(), 0);
    assert_eq!(slide_count(&dom, &page), 3);
    assert_eq!(page.poll(&mut dom, start + Duration::from_millis(150), &mut host).unwrap(), 1);
    assert_eq!(slide_count(&dom, &page), 7);
    assert_eq!(page.next_deadline(), None);
}

#[tokio::test(start_paused = true)]
async fn burst_of_resizes_rebuilds_once() {
    let (mut dom, mut page, mut host) = mount(7, "3");
    let (sender, receiver) = mpsc::channel(16);
    let resizes = async move {
        for width in [900, 760, 700, 640, 500] {
            sender.send(width).await.unwrap();
            sleep(Duration::from_millis(20)).await;
        }
    };
    let (rebuilt, ()) = tokio::join!(page.drive_resizes(&mut dom, &mut host, receiver), resizes);
    assert_eq!(rebuilt.unwrap(), 1);
    assert_eq!(host.redraws, 2);
    assert_eq!(slide_count(&dom, &page), 7);
}

#[tokio::test(start_paused = true)]
async fn separated_resizes_rebuild_each_time() {
    let (mut dom, mut page, mut host) = mount(7, "3");
    let (sender, receiver) = mpsc::channel(16);
    let resizes = async move {
        sender.send(500).await.unwrap();
        sleep(Duration::from_millis(300)).await;
        sender.send(1280).await.unwrap();
    };
    let (rebuilt, ()) = tokio::join!(page.drive_resizes(&mut dom, &mut host, receiver), resizes);
    assert_eq!(rebuilt.unwrap(), 2);
    assert_eq!(host.redraws, 3);
    assert_eq!(slide_count(&dom, &page), 3);
}

#[tokio::test(start_paused = true)]
async fn resize_within_same_breakpoint_is_skipped() {
    let (mut dom, mut page, mut host) = mount(6, "2");
    let (sender, receiver) = mpsc::channel(4);
    let resizes = async move {
        sender.send(1300).await.unwrap();
        sleep(Duration::from_millis(400)).await;
        sender.send(1900).await.unwrap();
    };
    let (rebuilt, ()) = tokio::join!(page.drive_resizes(&mut dom, &mut host, receiver), resizes);
    assert_eq!(rebuilt.unwrap(), 0);
    assert_eq!(host.redraws, 1);
    assert_eq!(slide_count(&dom, &page), 3);
}
