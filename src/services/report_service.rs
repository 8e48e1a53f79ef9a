// ============================================================================
// REPORT SERVICE - Resúmenes del dashboard + export CSV
// ============================================================================

use chrono::NaiveDate;
use wasm_bindgen::{JsCast, JsValue};
use crate::models::{DashboardStats, Parcel, ParcelStatus, PaymentType};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_parcels: usize,
    pub today_bookings: usize,
    pub failed_deliveries: usize,
    pub cod_amount: f64,
}

pub fn summarize(parcels: &[Parcel], today: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        total_parcels: parcels.len(),
        today_bookings: parcels
            .iter()
            .filter(|p| p.created_at.is_some_and(|created| created.date_naive() >= today))
            .count(),
        failed_deliveries: parcels
            .iter()
            .filter(|p| p.status == ParcelStatus::Failed)
            .count(),
        cod_amount: parcels
            .iter()
            .filter(|p| p.payment_type == PaymentType::Cod)
            .map(|p| p.cod_amount)
            .sum(),
    }
}

/// Totales del backend cuando los manda; el resto se calcula sobre la lista local
pub fn report_summary(stats: Option<&DashboardStats>, parcels: &[Parcel], today: NaiveDate) -> DashboardSummary {
    let local = summarize(parcels, today);
    let Some(stats) = stats else {
        return local;
    };
    let count = |backend: Option<u64>, fallback: usize| backend.map_or(fallback, |n| n as usize);
    DashboardSummary {
        total_parcels: count(stats.total_parcels, local.total_parcels),
        today_bookings: count(stats.today_bookings, local.today_bookings),
        failed_deliveries: count(stats.failed_deliveries, local.failed_deliveries),
        cod_amount: stats.cod_amount.unwrap_or(local.cod_amount),
    }
}

/// Contadores por estado sobre una lista local (dashboards de agente/cliente)
pub fn count_by_status(parcels: &[Parcel], status: &ParcelStatus) -> usize {
    parcels.iter().filter(|p| &p.status == status).count()
}

pub fn count_pending(parcels: &[Parcel]) -> usize {
    parcels.iter().filter(|p| p.is_pending()).count()
}

pub fn status_breakdown(stats: &DashboardStats) -> Vec<(ParcelStatus, u64)> {
    stats
        .status_breakdown
        .iter()
        .map(|item| (item.status.clone(), item.count))
        .collect()
}

/// 120.0 -> "120", 12.5 -> "12.5"
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}

const CSV_HEADERS: [&str; 13] = [
    "Tracking Number",
    "Customer Name",
    "Customer Email",
    "Pickup Address",
    "Delivery Address",
    "Parcel Size",
    "Parcel Type",
    "Payment Type",
    "Amount",
    "COD Amount",
    "Status",
    "Assigned Agent",
    "Created Date",
];

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

pub fn to_csv(parcels: &[Parcel]) -> String {
    let header = CSV_HEADERS.iter().map(|h| quote(h)).collect::<Vec<_>>().join(",");
    let rows = parcels.iter().map(|parcel| {
        let created = parcel
            .created_at
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        [
            parcel.tracking_number.clone(),
            parcel.customer_name.clone(),
            parcel.customer_email.clone(),
            parcel.pickup_address.clone(),
            parcel.delivery_address.clone(),
            parcel.parcel_size.as_str().to_string(),
            parcel.parcel_type.clone(),
            parcel.payment_type.as_str().to_string(),
            format_amount(parcel.amount),
            format_amount(parcel.cod_amount),
            parcel.status.to_string(),
            parcel.agent_name().to_string(),
            created,
        ]
        .iter()
        .map(|cell| quote(cell))
        .collect::<Vec<_>>()
        .join(",")
    });

    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

pub fn report_filename(date: NaiveDate) -> String {
    format!("parcel-report-{}.csv", date.format("%Y-%m-%d"))
}

/// Descarga el CSV via Blob URL + <a download>
pub fn download_csv(filename: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    log::info!("📄 [REPORTS] CSV exportado: {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::{AgentRef, StatusCount};
    use crate::models::parcel::AgentSummary;
    use crate::test_support::parcel;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summary_counts() {
        let mut today = parcel("a", ParcelStatus::Booked);
        today.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap());
        today.cod_amount = 50.0;

        let mut old = parcel("b", ParcelStatus::Failed);
        old.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap());
        old.cod_amount = 25.5;

        let mut prepaid = parcel("c", ParcelStatus::Delivered);
        prepaid.payment_type = PaymentType::Prepaid;
        prepaid.cod_amount = 999.0;

        let summary = summarize(&[today, old, prepaid], day(2024, 5, 2));
        assert_eq!(summary.total_parcels, 3);
        assert_eq!(summary.today_bookings, 1);
        assert_eq!(summary.failed_deliveries, 1);
        assert_eq!(summary.cod_amount, 75.5);
    }

    #[test]
    fn breakdown_from_stats() {
        let stats = DashboardStats {
            status_breakdown: vec![
                StatusCount { status: ParcelStatus::Booked, count: 4 },
                StatusCount { status: ParcelStatus::Delivered, count: 2 },
            ],
            ..DashboardStats::default()
        };
        assert_eq!(
            status_breakdown(&stats),
            vec![(ParcelStatus::Booked, 4), (ParcelStatus::Delivered, 2)]
        );
    }

    #[test]
    fn backend_totals_win_over_local_counts() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"statusBreakdown":[],"totalParcels":40,"todayBookings":3,"failedDeliveries":2,"codAmount":1250.5}"#,
        )
        .unwrap();
        let local = vec![parcel("a", ParcelStatus::Failed)];
        let summary = report_summary(Some(&stats), &local, day(2024, 5, 2));
        assert_eq!(
            summary,
            DashboardSummary {
                total_parcels: 40,
                today_bookings: 3,
                failed_deliveries: 2,
                cod_amount: 1250.5,
            }
        );

        // Solo statusBreakdown: todo sale de la lista local
        let partial: DashboardStats = serde_json::from_str(r#"{"statusBreakdown":[]}"#).unwrap();
        let summary = report_summary(Some(&partial), &local, day(2024, 5, 2));
        assert_eq!(summary.total_parcels, 1);
        assert_eq!(summary.failed_deliveries, 1);
        assert_eq!(summary.today_bookings, 0);
        assert_eq!(report_summary(None, &local, day(2024, 5, 2)), summary);
    }

    #[test]
    fn csv_quotes_every_cell() {
        let mut p = parcel("a", ParcelStatus::InTransit);
        p.customer_name = "Ana \"AJ\" Li".into();
        p.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap());
        p.agent_id = Some(AgentRef::Populated(AgentSummary {
            id: "ag".into(),
            name: "Bob".into(),
            email: None,
        }));

        let csv = to_csv(&[p, parcel("b", ParcelStatus::Booked)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"Tracking Number\",\"Customer Name\""));
        assert_eq!(
            lines[1],
            "\"TRK-a\",\"Ana \"\"AJ\"\" Li\",\"ana@example.com\",\"1 Main St\",\"2 High St\",\"small\",\"documents\",\"COD\",\"80\",\"0\",\"In Transit\",\"Bob\",\"2024-05-02\""
        );
        assert!(lines[2].contains("\"Not assigned\""));
    }

    #[test]
    fn amounts_and_filename() {
        assert_eq!(format_amount(120.0), "120");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(report_filename(day(2024, 1, 9)), "parcel-report-2024-01-09.csv");
    }

    #[test]
    fn local_counters() {
        let list = vec![
            parcel("a", ParcelStatus::Booked),
            parcel("b", ParcelStatus::Booked),
            parcel("c", ParcelStatus::Delivered),
        ];
        assert_eq!(count_by_status(&list, &ParcelStatus::Booked), 2);
        assert_eq!(count_pending(&list), 2);
    }
}
