use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use alertwire::condition::{CompareOperator, EventData, ThresholdData};
use alertwire::{
    Alert, Condition, EventConditionEval, FiredAlert, GenericConditionEval, MatchedEvent, Mode,
    NotificationBuilder, NotificationConfig, NotificationDispatcher, TagMultimap, TimestampZone,
    Trigger,
};

fn make_fired_alert(eval_sets: usize) -> FiredAlert {
    let threshold = Condition::single("bench", "trig", Mode::Firing, ThresholdData::new("cpu", CompareOperator::Gt, 90.0));
    let event = Condition::single("bench", "trig", Mode::Firing, EventData::new("inventory", Some("facts.arch = 'x86_64'".to_string())));
    let tags: TagMultimap = [("display_name", "host-1"), ("env", "prod")].into_iter().collect();

    let mut alert = Alert::new("bench", Trigger::new("trig", "Bench trigger"), 1_700_000_000_000);
    alert.tags = tags.clone();

    // Event evaluation sits in the last set so selection scans everything.
    alert.eval_sets = (0..eval_sets)
        .map(|_| vec![GenericConditionEval::new(&threshold, true, None).unwrap().into()])
        .collect();
    alert.eval_sets.push(vec![EventConditionEval::new(&event, MatchedEvent::new("inventory", 0).with_tags(tags))
        .unwrap()
        .into()]);
    FiredAlert::from_alert(alert)
}

fn bench_build(c: &mut Criterion) {
    let builder = NotificationBuilder::new(&NotificationConfig::default().with_zone(TimestampZone::Fixed { offset_seconds: 0 }));
    let mut group = c.benchmark_group("notification/build");
    for sets in [1usize, 16, 128] {
        let fired = make_fired_alert(sets);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("eval_sets_{sets}"), |b| {
            b.iter(|| builder.build(&fired).unwrap());
        });
    }
    group.finish();
}

fn bench_build_and_encode(c: &mut Criterion) {
    let builder = NotificationBuilder::new(&NotificationConfig::default().with_zone(TimestampZone::Fixed { offset_seconds: 0 }));
    let fired = make_fired_alert(4);
    c.bench_function("notification/build_encode", |b| {
        b.iter(|| builder.build(&fired).unwrap().encode().unwrap());
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let fired = make_fired_alert(4);
    c.bench_function("notification/process", |b| {
        let (dispatcher, stream) = NotificationDispatcher::new(&NotificationConfig::default());
        b.iter(|| {
            alertwire::ActionPlugin::process(&dispatcher, &fired).unwrap();
            // Keep the unbounded buffer from growing across iterations.
            let _ = stream.try_recv();
        });
    });
}

criterion_group!(benches, bench_build, bench_build_and_encode, bench_dispatch);
criterion_main!(benches);
