//! Compiled-in CDMX Metro catalog.
//!
//! A subset of the Mexico City Metro with approximate coordinates in a
//! normalized 0..100 plane. Positions are rough, only to support a
//! plausible spatial heuristic and schematic rendering.

use super::{NetworkBuilder, TransitNetwork};

/// Build the CDMX Metro network: five lines and their interchange
/// transfers.
pub fn cdmx_network() -> TransitNetwork {
    NetworkBuilder::new()
        // Line 1 (granate) Observatorio → Balderas
        .line(
            "1",
            "#8E2046",
            &[
                ("observatorio", "Observatorio", 5.0, 40.0),
                ("tacubaya_l1", "Tacubaya", 15.0, 40.0),
                ("juanacatlan", "Juanacatlán", 25.0, 40.0),
                ("chapultepec", "Chapultepec", 35.0, 40.0),
                ("sevilla", "Sevilla", 45.0, 40.0),
                ("insurgentes_l1", "Insurgentes", 55.0, 40.0),
                ("cuauhtemoc", "Cuauhtémoc", 65.0, 40.0),
                ("balderas_l1", "Balderas", 70.0, 40.0),
            ],
        )
        // Line 3 (verde claro) Universidad → Juárez
        .line(
            "3",
            "#6ECF68",
            &[
                ("universidad", "Universidad", 35.0, 95.0),
                ("copilco", "Copilco", 35.0, 90.0),
                ("ma_quevedo", "Miguel Ángel de Quevedo", 35.0, 85.0),
                ("viveros", "Viveros/Derechos", 35.0, 80.0),
                ("coyoacan", "Coyoacán", 35.0, 75.0),
                ("division", "División del Norte", 45.0, 70.0),
                ("zapata_l3", "Zapata", 55.0, 70.0),
                ("eugenia", "Eugenia", 60.0, 65.0),
                ("etiopia", "Etiopía/Plaza de la Transparencia", 65.0, 60.0),
                ("centro_medico_l3", "Centro Médico", 65.0, 55.0),
                ("hospital_general", "Hospital General", 67.0, 50.0),
                ("ninos_heroes", "Niños Héroes", 69.0, 45.0),
                ("balderas_l3", "Balderas", 70.0, 40.0),
                ("juarez", "Juárez", 72.0, 35.0),
            ],
        )
        // Line 7 (naranja) Barranca del Muerto → Polanco
        .line(
            "7",
            "#F59E0B",
            &[
                ("barranca", "Barranca del Muerto", 10.0, 85.0),
                ("mixcoac_l7", "Mixcoac", 20.0, 80.0),
                ("san_antonio", "San Antonio", 25.0, 70.0),
                ("san_pedro", "San Pedro de los Pinos", 25.0, 60.0),
                ("tacubaya_l7", "Tacubaya", 15.0, 40.0),
                ("constituyentes", "Constituyentes", 25.0, 35.0),
                ("auditorio", "Auditorio", 35.0, 30.0),
                ("polanco", "Polanco", 45.0, 30.0),
            ],
        )
        // Line 9 (marrón) Tacubaya → Lázaro Cárdenas
        .line(
            "9",
            "#8B5E3C",
            &[
                ("tacubaya_l9", "Tacubaya", 15.0, 40.0),
                ("patriotismo", "Patriotismo", 35.0, 50.0),
                ("chilpancingo", "Chilpancingo", 55.0, 55.0),
                ("centro_medico_l9", "Centro Médico", 65.0, 55.0),
                ("lazaro", "Lázaro Cárdenas", 75.0, 55.0),
            ],
        )
        // Line 12 (verde oscuro) Mixcoac → Eje Central
        .line(
            "12",
            "#065F46",
            &[
                ("mixcoac_l12", "Mixcoac", 20.0, 80.0),
                ("insurgentes_sur", "Insurgentes Sur", 30.0, 75.0),
                ("h20nov", "Hospital 20 de Noviembre", 40.0, 72.0),
                ("zapata_l12", "Zapata", 55.0, 70.0),
                ("parque_venados", "Parque de los Venados", 60.0, 68.0),
                ("eje_central", "Eje Central", 70.0, 65.0),
            ],
        )
        // Interchanges
        .transfer("mixcoac_l7", "mixcoac_l12")
        .transfer("zapata_l3", "zapata_l12")
        .transfer("tacubaya_l1", "tacubaya_l7")
        .transfer("tacubaya_l1", "tacubaya_l9")
        .transfer("tacubaya_l7", "tacubaya_l9")
        .transfer("centro_medico_l3", "centro_medico_l9")
        .transfer("balderas_l1", "balderas_l3")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn expected_size() {
        let net = cdmx_network();
        assert_eq!(net.station_count(), 41);
        // 36 consecutive line pairs + 7 transfer pairs, both directions
        assert_eq!(net.edge_count(), 86);
    }

    #[test]
    fn ids_are_unique() {
        let net = cdmx_network();
        let ids: HashSet<&str> = net.stations().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), net.station_count());
    }

    #[test]
    fn all_transfers_present_and_symmetric() {
        let net = cdmx_network();
        let pairs = [
            ("mixcoac_l7", "mixcoac_l12"),
            ("zapata_l3", "zapata_l12"),
            ("tacubaya_l1", "tacubaya_l7"),
            ("tacubaya_l1", "tacubaya_l9"),
            ("tacubaya_l7", "tacubaya_l9"),
            ("centro_medico_l3", "centro_medico_l9"),
            ("balderas_l1", "balderas_l3"),
        ];
        for (a, b) in pairs {
            assert!(net.edge_between(a, b).unwrap().kind.is_transfer(), "{a} → {b}");
            assert!(net.edge_between(b, a).unwrap().kind.is_transfer(), "{b} → {a}");
        }
    }

    #[test]
    fn transfer_endpoints_share_location_across_lines() {
        let net = cdmx_network();
        for station in net.stations() {
            for edge in net.neighbors(station.id.as_str()) {
                if !edge.kind.is_transfer() {
                    continue;
                }
                let other = net.station(edge.to.as_str()).unwrap();
                assert_ne!(station.line, other.line, "{} / {}", station.id, other.id);
                assert_eq!(station.x, other.x, "{} / {}", station.id, other.id);
                assert_eq!(station.y, other.y, "{} / {}", station.id, other.id);
            }
        }
    }

    #[test]
    fn line_edges_stay_on_one_line() {
        let net = cdmx_network();
        for station in net.stations() {
            for edge in net.neighbors(station.id.as_str()) {
                if let Some(line) = edge.kind.line() {
                    assert_eq!(line, &station.line, "edge {} → {}", edge.from, edge.to);
                }
            }
        }
    }

    #[test]
    fn terminal_ordinals() {
        let net = cdmx_network();
        assert_eq!(net.station("observatorio").unwrap().order, 1);
        assert_eq!(net.station("balderas_l1").unwrap().order, 8);
        assert_eq!(net.station("universidad").unwrap().order, 1);
        assert_eq!(net.station("juarez").unwrap().order, 14);
    }
}
