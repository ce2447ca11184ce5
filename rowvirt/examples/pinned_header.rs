// Example: keep a header row rendered while scrolling, via a custom range extractor.
use rowvirt::{IndexEmitter, Range, Virtualizer, VirtualizerOptions};

fn main() {
    let options = VirtualizerOptions::new(5_000)
        .with_estimate_size(|i| if i == 0 { 56.0 } else { 32.0 })
        .with_overscan(1)
        .with_range_extractor(Some(|range: Range, emit: &mut dyn FnMut(usize)| {
            let mut e = IndexEmitter::new(range, emit);
            e.emit(0);
            e.emit_overscanned();
        }));
    let mut v = Virtualizer::new(options);
    v.set_outer_size(320.0);

    for offset in [0.0, 3_200.0, 80_000.0] {
        v.set_scroll_offset(offset);
        let frame = v.compute();
        let rows: Vec<usize> = frame.items.iter().map(|it| it.index).collect();
        println!("offset={offset}: rows={rows:?}");
    }
}
