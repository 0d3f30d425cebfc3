use as3_declaration::{AppObject, Application, Envelope};
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    pub services: usize,
    pub pools: usize,
    pub monitors: usize,
    pub members: usize,
}

pub fn summarize(envelope: &Envelope) -> TranslationSummary {
    envelope
        .declaration
        .tenants
        .values()
        .flat_map(|tenant| tenant.applications.values())
        .fold(TranslationSummary::default(), |acc, app| {
            add(acc, count_application(app))
        })
}

pub fn render(summary: TranslationSummary) -> String {
    format!(
        "translate_summary services={} pools={} monitors={} members={}",
        summary.services, summary.pools, summary.monitors, summary.members
    )
}

fn count_application(app: &Application) -> TranslationSummary {
    let mut summary = TranslationSummary::default();
    for object in app.objects.values() {
        match object {
            AppObject::Service(_) => summary.services += 1,
            AppObject::Pool(pool) => {
                summary.pools += 1;
                summary.members += pool.members.len();
            }
            AppObject::Monitor(_) => summary.monitors += 1,
        }
    }
    summary
}

fn add(a: TranslationSummary, b: TranslationSummary) -> TranslationSummary {
    TranslationSummary {
        services: a.services + b.services,
        pools: a.pools + b.pools,
        monitors: a.monitors + b.monitors,
        members: a.members + b.members,
    }
}
