// Example: a filtered table of synthetic people rendered through a virtual list.
//
// The "table library" here is a Vec of records and a substring filter; the list only sees the
// filtered count, a row height estimate, and a stable key per record.
use std::sync::Arc;

use rowvirt::{Rect, VirtualizerOptions};
use rowvirt_host::{MemoryContainer, MemoryElement, ScrollContainer, VirtualList};

#[derive(Clone, Debug)]
struct Person {
    id: u32,
    name: String,
    company: String,
    email: String,
    note: String,
}

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, words: &[&'a str]) -> &'a str {
        words[self.next() as usize % words.len()]
    }
}

fn make_people(count: u32) -> Vec<Person> {
    const FIRST: &[&str] = &["Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret", "Dennis"];
    const LAST: &[&str] = &["Lovelace", "Hopper", "Torvalds", "Liskov", "Thompson", "Ritchie"];
    const COMPANY: &[&str] = &["Initech", "Globex", "Umbrella", "Hooli", "Vandelay"];
    const WORDS: &[&str] = &["lorem", "ipsum", "dolor", "sit", "amet", "consectetur"];

    let mut rng = Lcg(1);
    (0..count)
        .map(|id| {
            let first = rng.pick(FIRST);
            let last = rng.pick(LAST);
            let company = rng.pick(COMPANY);
            let words = 2 + rng.next() as usize % 12;
            let note = (0..words).map(|_| rng.pick(WORDS)).collect::<Vec<_>>().join(" ");
            Person {
                id,
                name: format!("{first} {last}"),
                company: company.to_string(),
                email: format!("{}.{}@{}.example", first, last, company).to_lowercase(),
                note,
            }
        })
        .collect()
}

fn filter<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    let query = query.to_lowercase();
    people
        .iter()
        .filter(|p| {
            [&p.name, &p.company, &p.email, &p.note]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

/// Rendered row height: one 24px line per 40 characters of note.
fn rendered_height(person: &Person) -> f64 {
    24.0 * person.note.len().div_ceil(40).max(1) as f64
}

fn options_for(rows: &[&Person]) -> VirtualizerOptions<u32> {
    let keys: Arc<Vec<u32>> = Arc::new(rows.iter().map(|p| p.id).collect());
    VirtualizerOptions::new_with_key(rows.len(), |_| 24.0, move |i| keys[i]).with_overscan(3)
}

fn render(list: &mut VirtualList<MemoryContainer, u32>, rows: &[&Person], label: &str) {
    let frame = list.render();
    // Lay out the rendered rows and report their real heights back.
    for item in &frame.items {
        let element = MemoryElement::new(rendered_height(rows[item.index]));
        list.measure_element(&item.measure_ref(), Some(&element));
    }
    let frame = list.render();
    println!(
        "[{label}] rows={} off={} total={} spacer_before={} spacer_after={}",
        rows.len(),
        list.scroll_offset(),
        frame.total_size,
        frame.padding_before(),
        frame.padding_after()
    );
    for item in frame.items.iter().take(4) {
        let p = rows[item.index];
        println!("    {:>6} {:<18} {:<10} {}", p.id, p.name, p.company, p.email);
    }
}

fn main() {
    let people = make_people(100_000);
    let container = MemoryContainer::new(1, Rect::new(1024.0, 600.0));

    let mut rows = filter(&people, "");
    let mut list = VirtualList::new(options_for(&rows));
    list.set_container(Some(container.clone()));
    render(&mut list, &rows, "initial");

    container.scroll_by(25_000.0);
    render(&mut list, &rows, "scrolled");

    container.resize(Rect::new(1024.0, 900.0));
    list.on_resize(container.id(), container.bounding_rect());
    render(&mut list, &rows, "resized");

    rows = filter(&people, "hooli");
    list.set_options(options_for(&rows));
    list.scroll_to_offset(0.0);
    render(&mut list, &rows, "filtered: hooli");

    list.set_container(None);
    println!("unmounted: listeners={}", container.listener_count());
}
