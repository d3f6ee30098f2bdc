//! Performance benchmarks for envelope rendering and response decoding.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use astute_client::config::AuthParams;
use astute_client::models::{QueryUserResponse, SaveTimesheetParams, TimesheetDay, UserParams};
use astute_client::soap::{Operation, decode_inner, decode_results, render_timesheet_save};

fn auth() -> AuthParams {
    AuthParams {
        api_url: "https://api.example.test/webservice/".to_string(),
        api_key: "KEY".to_string(),
        api_username: "bench".to_string(),
        api_password: "secret".to_string(),
    }
}

fn monday() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Creates save parameters with one day per calendar day from Monday.
fn save_params(day_count: usize) -> SaveTimesheetParams {
    let days = (0..day_count)
        .map(|i| {
            let start = monday() + Duration::days(i as i64);
            TimesheetDay {
                start_time: start,
                end_time: start + Duration::hours(8),
                break_time: "30".to_string(),
                notes: format!("Shift {} & handover <ward>", i + 1),
            }
        })
        .collect();

    SaveTimesheetParams {
        user: UserParams {
            uid: "1001".to_string(),
            user_id: "EMP-7".to_string(),
        },
        tsid: "555".to_string(),
        days,
        did_not_work: false,
        submit: true,
        submission_time: None,
    }
}

/// Creates a user query response envelope with `user_count` users.
fn user_query_response(user_count: usize) -> String {
    let users: String = (0..user_count)
        .map(|i| {
            format!(
                "&lt;User&gt;&lt;UID&gt;{i}&lt;/UID&gt;&lt;nameFirst&gt;First{i}&lt;/nameFirst&gt;&lt;email&gt;u{i}@example.test&lt;/email&gt;&lt;/User&gt;"
            )
        })
        .collect();

    format!(
        r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Body><ns1:UserQueryResponse xmlns:ns1="urn:UserQuery"><ParmsOut><Results>&lt;Users&gt;{}&lt;/Users&gt;</Results></ParmsOut></ns1:UserQueryResponse></SOAP-ENV:Body></SOAP-ENV:Envelope>"#,
        users
    )
}

/// Benchmark: rendering a timesheet save for one and two weeks of days.
fn bench_render_save(c: &mut Criterion) {
    let auth = auth();
    let mut group = c.benchmark_group("render_timesheet_save");

    for day_count in [7, 14] {
        let params = save_params(day_count);
        group.throughput(Throughput::Elements(day_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(day_count), &params, |b, params| {
            b.iter(|| {
                render_timesheet_save(&auth, "tx-bench", black_box(params), monday).unwrap()
            })
        });
    }

    group.finish();
}

/// Benchmark: both decode passes for a user query.
fn bench_decode_user_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_user_query");

    for user_count in [1, 100, 1000] {
        let body = user_query_response(user_count);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(user_count), &body, |b, body| {
            b.iter(|| {
                let results = decode_results(black_box(body.as_bytes()), Operation::UserQuery)
                    .unwrap();
                let users: QueryUserResponse = decode_inner(&results).unwrap();
                black_box(users)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_save, bench_decode_user_query);
criterion_main!(benches);
