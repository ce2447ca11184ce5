// Example: measured sizes replacing estimates, with scroll compensation.
use rowvirt::{Virtualizer, VirtualizerOptions};

fn main() {
    let mut v = Virtualizer::new(VirtualizerOptions::new(1_000).with_estimate_size(|_| 40.0));
    v.set_outer_size(400.0);
    v.set_scroll_offset(1_000.0);

    let frame = v.compute();
    println!("before: total={} range={:?}", frame.total_size, frame.range);

    // Pretend every rendered row laid out taller than estimated. Rows above the scroll offset
    // ask for a scroll correction so the visible content does not jump.
    for item in &frame.items {
        let real = 40.0 + (item.index % 3) as f64 * 12.5;
        if let Some(to) = v.report_size(&item.measure_ref(), real) {
            println!(
                "  row {} above viewport: scroll {} -> {to}",
                item.index,
                v.scroll_offset()
            );
            v.set_scroll_offset(to);
        }
    }

    let frame = v.compute();
    println!(
        "after: off={} total={} range={:?} cached={}",
        v.scroll_offset(),
        frame.total_size,
        frame.range,
        v.measured_cache().len()
    );

    // A new sizing strategy drops every measurement.
    v.set_estimate_size(|_| 64.0);
    let frame = v.compute();
    println!(
        "new estimator: total={} cached={}",
        frame.total_size,
        v.measured_cache().len()
    );
}
