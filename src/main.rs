use std::time::Duration;

use bus::{DomEvent, EventKind, Key};
use dom::{Document, Id};
use flext::{FlextOptions, FlextPage};
use layout::{MonospaceMeasurer, css_height, reflow_textarea};

const FRAME: Duration = Duration::from_millis(16);

struct Host {
    doc: Document,
    page: FlextPage,
    measurer: MonospaceMeasurer,
}

impl Host {
    fn press(&mut self, el: Id, key: Key) {
        let outcome = self.page.dispatch(&mut self.doc, &DomEvent::key_down(el, key.clone()));
        if !outcome.default_prevented
            && let Some(data) = self.doc.element_mut(el)
        {
            match &key {
                Key::Enter => data.value.push('\n'),
                Key::Char(c) => data.value.push(*c),
                Key::Backspace => {
                    data.value.pop();
                }
                Key::Other(_) => {}
            }
        }
        let model = self.page.options().scroll_height_model;
        reflow_textarea(&mut self.doc, el, &self.measurer, model);
        self.page.dispatch(&mut self.doc, &DomEvent::key_up(el, key));
    }

    fn height(&self, el: Id) -> f32 {
        self.doc.element(el).map(css_height).unwrap_or(0.0)
    }
}

fn build_page(doc: &mut Document) -> Result<(Id, Id, Id), dom::DomError> {
    let body = doc.append_element(Id::DOCUMENT, "body")?;
    let form = doc.append_element(body, "form")?;
    doc.try_element_mut(form)?.set_attr("name", "comment");
    let frame = doc.append_element(form, "div")?;
    doc.try_element_mut(frame)?.set_style("height", "120px");

    let ta = doc.append_element(frame, "textarea")?;
    let el = doc.try_element_mut(ta)?;
    el.set_attr(
        "class",
        "flext growme growparents stopenter entersubmits replaceghosttext ghost-text maxheight-160",
    );
    el.set_attr("ghosttext", "enter something here");
    el.set_attr("ghostclass", "ghost-text");
    el.set_value("enter something here");
    el.set_style("height", "48px");
    el.set_style("width", "240px");
    el.set_style("padding", "4px");
    Ok((form, frame, ta))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() {
        "Growing textareas keep up with whatever you type into them, one line after another, \
         until they hit their max height and start to scroll instead."
            .to_string()
    } else {
        text
    };

    let mut doc = Document::new();
    let (form, frame, ta) = build_page(&mut doc)?;
    let mut host = Host {
        doc,
        page: FlextPage::new(FlextOptions::default()),
        measurer: MonospaceMeasurer::default(),
    };
    host.page.scan(&mut host.doc)?;

    host.page.dispatch(&mut host.doc, &DomEvent::new(ta, EventKind::Focus));
    let mut elapsed = Duration::ZERO;
    let mut last = host.height(ta);
    println!("{:>6}  {:>8}  {:>8}", "ms", "textarea", "frame");

    for ch in text.chars() {
        host.press(ta, Key::Char(ch));
        // One key per frame.
        host.page.tick(&mut host.doc, FRAME);
        elapsed += FRAME;
        let now = host.height(ta);
        if now != last {
            let frame_height = host.doc.element(frame).map(css_height).unwrap_or(0.0);
            println!("{:>6}  {now:>8.1}  {frame_height:>8.1}", elapsed.as_millis());
            last = now;
        }
    }
    while host.page.tick(&mut host.doc, FRAME) {
        elapsed += FRAME;
    }

    host.press(ta, Key::Enter);
    host.page.dispatch(&mut host.doc, &DomEvent::new(ta, EventKind::Blur));

    let submitted = host.doc.take_submissions().contains(&form);
    println!(
        "settled after {}ms: height {:.1}px, overflow {}, submitted: {submitted}",
        elapsed.as_millis(),
        host.height(ta),
        host.doc
            .element(ta)
            .and_then(|e| e.style("overflow"))
            .unwrap_or("visible"),
    );
    Ok(())
}
