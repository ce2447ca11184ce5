use rowvirt::{Virtualizer, VirtualizerOptions};

fn main() {
    let mut v = Virtualizer::new(VirtualizerOptions::new(10_000).with_overscan(2));
    v.set_outer_size(480.0);
    v.set_scroll_offset(12_345.0);

    let frame = v.compute();
    println!(
        "total={} range={:?} spacer_before={} spacer_after={}",
        frame.total_size,
        frame.range,
        frame.padding_before(),
        frame.padding_after()
    );
    for item in &frame.items {
        println!("  row {:>5} @ {:>8} (+{})", item.index, item.start, item.size);
    }
}
