//! IRI constants for every vocabulary term the viewer reads.
//!
//! Grouped by namespace so call sites read as `rdfs::LABEL`, `owl::CLASS`.

/// RDF syntax namespace.
pub mod rdf {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:type`
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDF Schema namespace.
pub mod rdfs {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// `rdfs:label`
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:subClassOf`
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:isDefinedBy`
    pub const IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
}

/// OWL 2 namespace.
pub mod owl {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    /// `owl:Ontology`
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:NamedIndividual`
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:ObjectProperty`
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:AnnotationProperty`
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// `owl:versionIRI`
    pub const VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";
    /// `owl:versionInfo`
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
}

/// XML Schema datatypes namespace.
pub mod xsd {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

/// SKOS core namespace.
pub mod skos {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    /// `skos:definition`
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
    /// `skos:prefLabel`
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    /// `skos:altLabel`
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
}

/// Dublin Core terms namespace.
pub mod dcterms {
    /// Namespace IRI.
    pub const NS: &str = "http://purl.org/dc/terms/";
    /// `dcterms:title`
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    /// `dcterms:description`
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    /// `dcterms:hasVersion`
    pub const HAS_VERSION: &str = "http://purl.org/dc/terms/hasVersion";
    /// `dcterms:license`
    pub const LICENSE: &str = "http://purl.org/dc/terms/license";
    /// `dcterms:rights`
    pub const RIGHTS: &str = "http://purl.org/dc/terms/rights";
    /// `dcterms:accessRights`
    pub const ACCESS_RIGHTS: &str = "http://purl.org/dc/terms/accessRights";
    /// `dcterms:rightsHolder`
    pub const RIGHTS_HOLDER: &str = "http://purl.org/dc/terms/rightsHolder";
    /// `dcterms:bibliographicCitation`
    pub const BIBLIOGRAPHIC_CITATION: &str = "http://purl.org/dc/terms/bibliographicCitation";
}

/// Dublin Core elements 1.1 namespace.
pub mod dc {
    /// Namespace IRI.
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";
    /// `dc:title`
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    /// `dc:description`
    pub const DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
    /// `dc:rights`
    pub const RIGHTS: &str = "http://purl.org/dc/elements/1.1/rights";
}

/// OBO Foundry namespace (Information Artifact Ontology annotations).
pub mod obo {
    /// Namespace IRI.
    pub const NS: &str = "http://purl.obolibrary.org/obo/";
    /// `obo:IAO_0000115` (definition)
    pub const DEFINITION: &str = "http://purl.obolibrary.org/obo/IAO_0000115";
    /// `obo:IAO_0000111` (editor preferred term)
    pub const EDITOR_PREFERRED_TERM: &str = "http://purl.obolibrary.org/obo/IAO_0000111";
    /// `obo:IAO_0000118` (alternative term)
    pub const ALTERNATIVE_TERM: &str = "http://purl.obolibrary.org/obo/IAO_0000118";
    /// `obo:IAO_0000606` (abbreviation)
    pub const ABBREVIATION: &str = "http://purl.obolibrary.org/obo/IAO_0000606";
    /// `obo:IAO_0000119` (definition source)
    pub const DEFINITION_SOURCE: &str = "http://purl.obolibrary.org/obo/IAO_0000119";
}

/// Common Core Ontologies, legacy namespace.
pub mod cco {
    /// Namespace IRI.
    pub const NS: &str = "http://www.ontologyrepository.com/CommonCoreOntologies/";
    /// `cco:definition`
    pub const DEFINITION: &str = "http://www.ontologyrepository.com/CommonCoreOntologies/definition";
    /// `cco:alternative_label`
    pub const ALTERNATIVE_LABEL: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/alternative_label";
    /// `cco:acronym`
    pub const ACRONYM: &str = "http://www.ontologyrepository.com/CommonCoreOntologies/acronym";
    /// `cco:definition_source`
    pub const DEFINITION_SOURCE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/definition_source";
    /// `cco:doctrinal_source`
    pub const DOCTRINAL_SOURCE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/doctrinal_source";
}

/// Common Core Ontologies, current (opaque identifier) namespace.
pub mod cco2 {
    /// Namespace IRI.
    pub const NS: &str = "https://www.commoncoreontologies.org/";
    /// `cco2:ont00001753` (acronym)
    pub const ACRONYM: &str = "https://www.commoncoreontologies.org/ont00001753";
    /// `cco2:ont00001754` (definition source)
    pub const DEFINITION_SOURCE: &str = "https://www.commoncoreontologies.org/ont00001754";
    /// `cco2:ont00001745` (doctrinal source)
    pub const DOCTRINAL_SOURCE: &str = "https://www.commoncoreontologies.org/ont00001745";
    /// `cco2:ont00001760` (is curated in ontology)
    pub const IS_CURATED_IN: &str = "https://www.commoncoreontologies.org/ont00001760";
}
