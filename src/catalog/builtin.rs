use super::{Catalog, Category, DocumentRecord};

const BUILTIN_DOCUMENTS: &[(&str, &str, &str, Category)] = &[
    ("cdea-services", "CDEA Services techniques", "CDEA_Services_techniques", Category::Ppve),
    ("conseil-essonne", "Conseil départemental Essonne", "Conseil_departemental_de_Essonne", Category::Ppve),
    ("dgac", "DGAC", "DGAC", Category::Ppve),
    ("drac-idf", "DRAC Ile de France", "DRAC_Ile_de_France", Category::Ppve),
    ("eau-coeur-plan", "Eau Coeur Essonne - Plan", "Eau_Coeur_Essonne_Plan", Category::Ppve),
    ("eau-coeur", "Eau Coeur Essonne", "Eau_Coeur_Essonne", Category::Ppve),
    ("enedis", "ENEDIS", "ENEDIS", Category::Ppve),
    ("rte1", "RTE 1", "RTE1", Category::Ppve),
    ("rte2", "RTE 2", "RTE2", Category::Ppve),
    ("rte-plan1", "RTE plan 1", "RTE_plan1", Category::Ppve),
    ("rte-plan2", "RTE plan 2", "RTE_plan2", Category::Ppve),
    ("sdis91", "SDIS 91", "SDIS91", Category::Ppve),
    ("syndicat-orge", "Syndicat de l'Orge", "Syndicat_de_Orge", Category::Ppve),
    ("total-energie", "TOTALEnergie", "TOTALEnergie", Category::Ppve),
    ("avis-mrae", "Avis autorité environnementale", "Avis_autorite_environnementale_MRAE", Category::Additional),
    ("reponse-mrae", "Réponse autorité environnementale", "Reponse_autorite_environnementale_MRAE", Category::Additional),
    ("cerfa-fleury", "CERFA Formulaire Fleury Mérogis", "00-_CERFA_Formulaire_Fleury_Merogis", Category::PermisAmenager),
    ("cerfa-plessis", "CERFA Formulaire Le Plessis pate", "00-_CERFA_Formulaire_Le_Plessis_pate", Category::PermisAmenager),
    ("cerfa-formulaire", "CERFA Formulaire", "00-_CERFA_Formulaire", Category::PermisAmenager),
    ("cerfa-recepisse", "CERFA Récépissé de dépôt", "00-_CERFA_Recepisse_de_depot", Category::PermisAmenager),
    ("pouvoir-depot", "Pouvoir de dépôt", "00-_Pouvoir_de_depot", Category::PermisAmenager),
    ("pa1-plan-situation", "PA1- Plan de situation", "PA1-_Plan_de_situation", Category::PermisAmenager),
    ("pa2-notice-completee", "PA2- Notice complétée", "PA2-_Notice_completee", Category::PermisAmenager),
    ("pa2-notice-terrain", "PA2- Notice décrivant le terrain et le projet d'aménagement", "PA2-_Notice_decrivant_le_terrain_et_le_projet_amenagement", Category::PermisAmenager),
    ("pa3-plan-actuel", "PA3- Plan état actuel", "PA3-_Plan_etat_actuel", Category::PermisAmenager),
    ("pa4-01-plan-general", "PA4- 01- Plan Général", "PA4-_01-_Plan_General", Category::PermisAmenager),
    ("pa4-01-plan-projet", "PA4- 01- Plan Projet", "PA4-_01-_Plan_Projet", Category::PermisAmenager),
    ("pa4-02-coupes-projet", "PA4- 02- Coupes Projet", "PA4-_02-_Coupes_Projet", Category::PermisAmenager),
    ("pa4-02-coupes", "PA4- 02- Coupes", "PA4-_02-_Coupes", Category::PermisAmenager),
    ("pa4-03-nivellement", "PA4- 03- Nivellement", "PA4-_03-_Nivellement", Category::PermisAmenager),
    ("pa4-03-plan-voirie", "PA4- 03- Plan de voirie et de nivellement", "PA4-_03-_Plan_de_voirie_et_de_nivellement", Category::PermisAmenager),
    ("pa4-04-assainissement", "PA4- 04- Assainissement", "PA4-_04-_Assainissement", Category::PermisAmenager),
    ("pa4-04-plan-assainissement", "PA4- 04- Plan d'assainissement", "PA4-_04-_Plan_assainissement", Category::PermisAmenager),
    ("pa4-05-detail-parcelles", "PA4- 05- Détail des parcelles FLEURY MEROGIS", "PA4-_05-_Detail_des_parcelles_FLEURY_MEROGIS", Category::PermisAmenager),
    ("pa4-06-notice-hydraulique", "PA4- 06- Notice hydraulique des noues", "PA4-_06-_Notice_hydraulique_des_noues", Category::PermisAmenager),
    ("pa14-etude-impact", "PA14- Etude d'impact", "PA14-_Etude_impact", Category::PermisAmenager),
    ("pa42-01-ccct-arrete", "PA42- 01- CCCT - Arrêté approbation CCCT", "PA42-_01-_CCCT_-_Arrete_approbation_CCCT", Category::PermisAmenager),
    ("pa42-01-ccct-signe", "PA42- 01- CCCT signé", "PA42-_01-_CCCT_signe", Category::PermisAmenager),
    ("pa42-02-annexe-cahier", "PA42- 02- Annexe 1 Cahier des charges Parc energetique", "PA42-_02-_Annexe_1_Cahier_des_charges_Parc_energetique", Category::PermisAmenager),
    ("pa42-03-autorisation", "PA42- 03- Autorisation aménageur", "PA42-_03-_Autorisation_amenageur", Category::PermisAmenager),
];

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        let records = BUILTIN_DOCUMENTS
            .iter()
            .map(|(id, title, filename, category)| DocumentRecord {
                id: id.to_string(),
                title: title.to_string(),
                filename: filename.to_string(),
                category: *category,
            })
            .collect();

        Self { records }
    }
}
