use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rmaskedphone::{
    binding::memory::{type_text, MemoryDocument},
    AttachOptions, EditSession, ManualClock, SubmitOutcome,
};

/// Full keystroke pipeline: cap check, insertion, normalization, rendering
/// and sink writes for every typed char, then the submit pass.
fn typing_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut group = c.benchmark_group("Typing");
    for (name, typed) in [
        ("national", "0971234567"),
        ("international", "+380971234567"),
        ("overflowing paste-like typing", "05012345678901234567"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut document = MemoryDocument::new();
                let form = document.add_form();
                let field = document.add_input(Some(form), &[("id", "phone")]);
                let e164 = document.add_input(Some(form), &[("name", "phone_e164")]);
                let mut session = EditSession::attach_with_clock(
                    field,
                    AttachOptions::new().with_e164_sink(e164),
                    Box::new(ManualClock::new()),
                );
                type_text(&mut session, black_box(typed));
                assert_eq!(session.submit(), SubmitOutcome::Proceed);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, typing_benchmark);
criterion_main!(benches);
