// src/services/listing.rs
//
// Transformação pura de imóvel + unidades em view-model pronto para
// exibição. Nenhum I/O aqui: tudo que esta camada faz é agregar,
// normalizar e coagir dados crus (inclusive linhas legadas em que as
// fotos chegam como string JSON).

use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::{
    listing::{DisplayStatus, OwnerSummary, PropertyListing},
    property::{Property, PropertyUnit, RentPeriod},
};

// Uma unidade conta como disponível a menos que esteja marcada
// explicitamente como ocupada. NULL é disponível.
fn unit_is_available(unit: &PropertyUnit) -> bool {
    unit.is_available != Some(false)
}

// Menor aluguel entre o valor legado do imóvel e os das unidades,
// junto com o período da unidade que realizou o mínimo. Candidatos
// não positivos são ignorados; sem candidato nenhum, o aluguel é zero
// e o período cai no padrão "mois".
fn computed_rent(property: &Property, units: &[PropertyUnit]) -> (Decimal, RentPeriod) {
    let mut best: Option<Decimal> = None;
    let mut period = RentPeriod::Mois;

    if let Some(amount) = property.rent_amount {
        if amount > Decimal::ZERO {
            best = Some(amount);
        }
    }

    for unit in units {
        if unit.monthly_rent <= Decimal::ZERO {
            continue;
        }
        let lower = match best {
            Some(current) => unit.monthly_rent < current,
            None => true,
        };
        if lower {
            best = Some(unit.monthly_rent);
            period = unit.rent_period.unwrap_or_default();
        }
    }

    (best.unwrap_or(Decimal::ZERO), period)
}

/// Interpreta uma coluna JSON que deveria ser um array de strings.
/// Linhas legadas guardam o array codificado como string; JSON malformado
/// vira lista vazia, nunca erro.
pub fn parse_string_list(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
        Some(Value::String(encoded)) => {
            serde_json::from_str::<Vec<String>>(encoded).unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Normaliza as fotos: URLs relativas ganham a origem pública da API,
/// entradas vazias caem fora e duplicatas são removidas preservando a ordem.
pub fn normalize_photos(raw: Option<&Value>, base_url: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    let mut out: Vec<String> = Vec::new();

    for photo in parse_string_list(raw) {
        let trimmed = photo.trim();
        if trimmed.is_empty() {
            continue;
        }
        let absolute = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_owned()
        } else {
            format!("{}/{}", base, trimmed.trim_start_matches('/'))
        };
        if !out.contains(&absolute) {
            out.push(absolute);
        }
    }

    out
}

// Quartos somados entre as unidades. Uma unidade do tipo "chambre" sem
// contagem explícita vale um quarto.
fn aggregated_bedrooms(units: &[PropertyUnit]) -> i32 {
    units
        .iter()
        .map(|u| match u.bedrooms {
            Some(n) => n,
            None if u.unit_type.eq_ignore_ascii_case("chambre") => 1,
            None => 0,
        })
        .sum()
}

/// Monta o view-model de exibição a partir das linhas cruas.
pub fn build_listing(
    property: Property,
    units: Vec<PropertyUnit>,
    owner: Option<OwnerSummary>,
    base_url: &str,
) -> PropertyListing {
    let (rent_amount, primary_rent_period) = computed_rent(&property, &units);

    let total_units = units.len() as u32;
    let available_units = units.iter().filter(|u| unit_is_available(u)).count() as u32;

    let published = property.is_published || property.status.as_deref() == Some("published");

    // Um imóvel sem unidade nenhuma não pode ficar "occupied" só por
    // falta de dados de unidade.
    let display_status = if published && (available_units > 0 || total_units == 0) {
        DisplayStatus::Available
    } else {
        DisplayStatus::Occupied
    };

    let photos = normalize_photos(property.photos.as_ref(), base_url);
    let equipments = parse_string_list(property.equipments.as_ref());
    let cover_photo = photos.first().cloned();

    let bedrooms = aggregated_bedrooms(&units);
    let area: Decimal = units
        .iter()
        .map(|u| u.area_sqm.unwrap_or(Decimal::ZERO))
        .sum();
    let bathrooms: i32 = units.iter().map(|u| u.bathrooms.unwrap_or(0)).sum();

    PropertyListing {
        id: property.id,
        owner_id: property.owner_id,
        property_type: property.property_type,
        name: property.name,
        address: property.address,
        lat: property.lat,
        lng: property.lng,
        description: property.description,
        photos,
        equipments,
        is_published: published,
        published_at: property.published_at,
        rent_amount,
        primary_rent_period,
        total_units,
        available_units,
        display_status,
        cover_photo,
        aggregated_bedrooms: bedrooms,
        aggregated_area: area,
        aggregated_bathrooms: bathrooms,
        units,
        owner,
        created_at: property.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    const BASE: &str = "https://api.samalocation.sn";

    fn property() -> Property {
        Property {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            property_type: "immeuble".into(),
            name: "Résidence Teranga".into(),
            address: "Ouakam, Dakar".into(),
            lat: None,
            lng: None,
            description: None,
            photos: None,
            equipments: None,
            rent_amount: None,
            status: None,
            is_published: true,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn unit(rent: i64, period: Option<RentPeriod>) -> PropertyUnit {
        PropertyUnit {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            unit_type: "appartement".into(),
            unit_number: "A-01".into(),
            monthly_rent: Decimal::from(rent),
            area_sqm: None,
            bedrooms: None,
            bathrooms: None,
            is_available: None,
            rent_period: period,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn aluguel_calculado_e_o_minimo_e_o_periodo_acompanha() {
        let mut p = property();
        p.rent_amount = Some(Decimal::from(250_000));

        let units = vec![
            unit(90_000, Some(RentPeriod::Mois)),
            unit(15_000, Some(RentPeriod::Jour)),
            unit(45_000, Some(RentPeriod::Semaine)),
        ];

        let listing = build_listing(p, units, None, BASE);
        assert_eq!(listing.rent_amount, Decimal::from(15_000));
        assert_eq!(listing.primary_rent_period, RentPeriod::Jour);
    }

    #[test]
    fn aluguel_do_imovel_pode_ser_o_minimo_com_periodo_padrao() {
        let mut p = property();
        p.rent_amount = Some(Decimal::from(10_000));

        let listing = build_listing(p, vec![unit(90_000, Some(RentPeriod::Jour))], None, BASE);
        assert_eq!(listing.rent_amount, Decimal::from(10_000));
        // O mínimo veio do imóvel, não de uma unidade: período padrão
        assert_eq!(listing.primary_rent_period, RentPeriod::Mois);
    }

    #[test]
    fn candidatos_nao_positivos_sao_ignorados() {
        let mut p = property();
        p.rent_amount = Some(Decimal::ZERO);

        let listing = build_listing(p, vec![unit(0, None), unit(-5, None)], None, BASE);
        assert_eq!(listing.rent_amount, Decimal::ZERO);
        assert_eq!(listing.primary_rent_period, RentPeriod::Mois);
    }

    #[test]
    fn imovel_publicado_sem_unidades_fica_disponivel() {
        let listing = build_listing(property(), vec![], None, BASE);
        assert_eq!(listing.display_status, DisplayStatus::Available);
        assert_eq!(listing.total_units, 0);
    }

    #[test]
    fn todas_as_unidades_ocupadas_marca_occupied() {
        let mut u1 = unit(50_000, None);
        let mut u2 = unit(60_000, None);
        u1.is_available = Some(false);
        u2.is_available = Some(false);

        let listing = build_listing(property(), vec![u1, u2], None, BASE);
        assert_eq!(listing.display_status, DisplayStatus::Occupied);
        assert_eq!(listing.available_units, 0);
    }

    #[test]
    fn nao_publicado_nunca_fica_disponivel() {
        let mut p = property();
        p.is_published = false;

        let listing = build_listing(p, vec![unit(50_000, None)], None, BASE);
        assert_eq!(listing.display_status, DisplayStatus::Occupied);
    }

    #[test]
    fn status_legado_published_conta_como_publicado() {
        let mut p = property();
        p.is_published = false;
        p.status = Some("published".into());

        let listing = build_listing(p, vec![], None, BASE);
        assert_eq!(listing.display_status, DisplayStatus::Available);
        assert!(listing.is_published);
    }

    #[test]
    fn unidade_com_is_available_nulo_conta_como_disponivel() {
        let mut busy = unit(50_000, None);
        busy.is_available = Some(false);

        let listing = build_listing(property(), vec![busy, unit(60_000, None)], None, BASE);
        assert_eq!(listing.available_units, 1);
        assert_eq!(listing.display_status, DisplayStatus::Available);
    }

    #[test]
    fn chambre_sem_contagem_vale_um_quarto() {
        let mut chambre = unit(30_000, None);
        chambre.unit_type = "chambre".into();
        let mut apt = unit(80_000, None);
        apt.bedrooms = Some(2);

        let listing = build_listing(property(), vec![chambre, apt], None, BASE);
        assert_eq!(listing.aggregated_bedrooms, 3);
    }

    #[test]
    fn somatorios_de_area_e_banheiros() {
        let mut u1 = unit(30_000, None);
        u1.area_sqm = Some(Decimal::from(20));
        u1.bathrooms = Some(1);
        let mut u2 = unit(40_000, None);
        u2.area_sqm = Some(Decimal::from(35));
        u2.bathrooms = Some(2);
        let u3 = unit(50_000, None); // sem dados: contribui zero

        let listing = build_listing(property(), vec![u1, u2, u3], None, BASE);
        assert_eq!(listing.aggregated_area, Decimal::from(55));
        assert_eq!(listing.aggregated_bathrooms, 3);
    }

    #[test]
    fn fotos_em_string_json_legada_sao_interpretadas() {
        let mut p = property();
        p.photos = Some(json!(r#"["a.jpg","b.jpg"]"#));

        let listing = build_listing(p, vec![], None, BASE);
        assert_eq!(
            listing.photos,
            vec![
                "https://api.samalocation.sn/a.jpg".to_string(),
                "https://api.samalocation.sn/b.jpg".to_string(),
            ]
        );
        assert_eq!(
            listing.cover_photo.as_deref(),
            Some("https://api.samalocation.sn/a.jpg")
        );
    }

    #[test]
    fn fotos_malformadas_viram_lista_vazia_sem_erro() {
        let mut p = property();
        p.photos = Some(json!("{nao é json["));

        let listing = build_listing(p, vec![], None, BASE);
        assert!(listing.photos.is_empty());
        assert!(listing.cover_photo.is_none());
    }

    #[test]
    fn urls_absolutas_ficam_intactas_e_duplicatas_caem() {
        let raw = json!([
            "https://cdn.exemplo.com/x.jpg",
            "/uploads/y.jpg",
            "uploads/y.jpg",
            "",
        ]);
        let photos = normalize_photos(Some(&raw), BASE);
        assert_eq!(
            photos,
            vec![
                "https://cdn.exemplo.com/x.jpg".to_string(),
                "https://api.samalocation.sn/uploads/y.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn entradas_nao_string_no_array_sao_descartadas() {
        let raw = json!(["a.jpg", 42, null, {"k": "v"}]);
        let photos = normalize_photos(Some(&raw), BASE);
        assert_eq!(photos, vec!["https://api.samalocation.sn/a.jpg".to_string()]);
    }
}
