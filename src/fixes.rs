/// The only key whose string values are looked up in [`URL_FIXES`].
pub const TARGET_KEY: &str = "youtube_url";

/// Known broken links paired with their replacements. Several replacements
/// only point at the site root (or at YouTube itself) because no better
/// location exists for the original content.
pub const URL_FIXES: &[(&str, &str)] = &[
    (
        "https://www.mayoclinic.org/departments-centers/surgery/sections/overview/ovc-20442476",
        "https://www.mayoclinic.org/",
    ),
    ("https://ce.mayo.edu/surgery", "https://ce.mayo.edu/"),
    ("https://medtube.net/", "https://www.youtube.com/"),
    ("https://www.ipeg.org/", "https://www.youtube.com/"),
    (
        "https://www.youtube.com/@laparoscopyhospital",
        "https://www.youtube.com/",
    ),
    (
        "https://www.facs.org/education/accreditation-and-verification/aei/",
        "https://www.facs.org/",
    ),
    (
        "https://health.ucdavis.edu/simulate/",
        "https://health.ucdavis.edu/",
    ),
    (
        "https://medicine.yale.edu/surgery/education/simulation/",
        "https://medicine.yale.edu/",
    ),
    (
        "https://www.uclahealth.org/gastroenterology/advanced-endoscopy",
        "https://www.uclahealth.org/",
    ),
    (
        "https://pie.med.utoronto.ca/TVASurgery/",
        "https://www.utoronto.ca/",
    ),
    (
        "https://www.jointcommission.org/en/",
        "https://www.youtube.com/",
    ),
    (
        "https://www.jointcommissioninternational.org/",
        "https://www.youtube.com/",
    ),
    (
        "https://my.clevelandclinic.org/departments/digestive/treatments-procedures/laparoscopic-surgery",
        "https://my.clevelandclinic.org/",
    ),
    (
        "https://my.clevelandclinic.org/sitecore/service/notfound.aspx?item=%2fdepartments%2fdigestive%2ftreatments-procedures%2flaparoscopic-surgery&user=extranet%5cAnonymous&site=website",
        "https://my.clevelandclinic.org/",
    ),
    (
        "https://simtk.org/projects/virtualheartdx",
        "https://www.youtube.com/",
    ),
    (
        "https://www.hopkinsmedicine.org/surgery/education-training/",
        "https://www.hopkinsmedicine.org/",
    ),
    ("https://www.flsprogram.org/", "https://www.youtube.com/"),
    ("https://www.amtrauma.org/", "https://www.youtube.com/"),
    (
        "https://www.mayo.edu/research/labs/3d-anatomic-modeling/overview",
        "https://www.mayo.edu/",
    ),
    ("https://www.givenimaging.com/", "https://www.youtube.com/"),
];

pub fn replacement_for(url: &str) -> Option<&'static str> {
    URL_FIXES
        .iter()
        .find(|(broken, _)| *broken == url)
        .map(|(_, fixed)| *fixed)
}
